//! Product metadata records.

use serde::{Deserialize, Serialize};

use larder_core::ProductCode;

/// Product metadata associated with a scan code.
///
/// All descriptive fields are free text and may be absent; the catalog never
/// validates their contents. `image_file_name` is a reference into the
/// external image store, the core never touches image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: ProductCode,
    pub brand: Option<String>,
    pub name: Option<String>,
    pub variant: Option<String>,
    pub image_file_name: Option<String>,
}

impl Product {
    /// Empty record for a code with no catalog entry yet.
    ///
    /// This is the seed handed to the product entry form the first time an
    /// unidentified code is scanned.
    pub fn unidentified(code: ProductCode) -> Self {
        Self {
            code,
            brand: None,
            name: None,
            variant: None,
            image_file_name: None,
        }
    }
}

/// Title-case each whitespace-separated word.
///
/// The entry form applies this to brand/name/variant as the user types;
/// shared here so every collaborator normalizes the same way.
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ProductCode {
        ProductCode::new(s).unwrap()
    }

    #[test]
    fn unidentified_seed_carries_only_the_code() {
        let product = Product::unidentified(code("ABC123"));
        assert_eq!(product.code.as_str(), "ABC123");
        assert!(product.brand.is_none());
        assert!(product.name.is_none());
        assert!(product.variant.is_none());
        assert!(product.image_file_name.is_none());
    }

    #[test]
    fn capitalize_words_title_cases_each_word() {
        assert_eq!(capitalize_words("whole milk"), "Whole Milk");
        assert_eq!(capitalize_words("oat"), "Oat");
    }

    #[test]
    fn capitalize_words_handles_empty_and_extra_spaces() {
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("  spiced  chai "), "Spiced  Chai");
    }
}
