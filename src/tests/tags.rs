// Unit Tests for Tag Normalization
//
// UNIT UNDER TEST: Tags
//
// BUSINESS RESPONSIBILITY:
//   - Accepts every supported tag shape (none, one string, a list)
//   - Normalizes all shapes into one ordered sequence
//   - Coerces malformed dynamic input to no tags instead of failing
//
// TEST COVERAGE:
//   - Single string equivalence with a one-element list
//   - Order preservation for lists, arrays and slices
//   - JSON coercion for strings, arrays and other values

use crate::tags::Tags;
use crate::tests::helpers::strings;
use serde_json::json;

#[cfg(test)]
mod tag_normalization_tests {
    use super::*;

    #[test]
    fn test_empty_tags_normalize_to_empty_sequence() {
        assert!(Tags::Empty.normalize().is_empty());
        assert!(Tags::from(()).normalize().is_empty());
        assert!(Tags::default().is_empty());
    }

    #[test]
    fn test_single_string_equals_one_element_list() {
        // Test verifies a bare string tag behaves exactly like ["tag"]

        // Arrange
        let single = Tags::from("extra");
        let list = Tags::from(vec!["extra"]);

        // Act & Assert
        assert_eq!(single.clone().normalize(), list.clone().normalize());
        assert_eq!(single.len(), 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_list_shapes_preserve_order() {
        let expected = strings(&["b", "a", "c"]);

        assert_eq!(Tags::from(["b", "a", "c"]).normalize(), expected);
        assert_eq!(Tags::from(&["b", "a", "c"]).normalize(), expected);
        assert_eq!(Tags::from(vec!["b", "a", "c"]).normalize(), expected);
        assert_eq!(Tags::from(expected.clone()).normalize(), expected);
        assert_eq!(Tags::from(expected.as_slice()).normalize(), expected);
    }

    #[test]
    fn test_empty_list_is_empty() {
        let tags = Tags::from(Vec::<String>::new());
        assert!(tags.is_empty());
        assert_eq!(tags.len(), 0);
    }
}

#[cfg(test)]
mod dynamic_tag_coercion_tests {
    use super::*;

    #[test]
    fn test_json_string_becomes_single_tag() {
        assert_eq!(Tags::from(json!("extra")), Tags::Single("extra".to_string()));
    }

    #[test]
    fn test_json_array_keeps_string_entries_in_order() {
        // Non-string entries are dropped rather than stringified

        // Arrange
        let value = json!(["a", 1, "b", null, {"k": "v"}, "c"]);

        // Act
        let tags = Tags::from(&value).normalize();

        // Assert
        assert_eq!(tags, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_malformed_json_coerces_to_empty() {
        for value in [json!(42), json!(true), json!(null), json!({"tag": "x"})] {
            assert_eq!(Tags::from(value.clone()), Tags::Empty, "value {value} should coerce");
        }
    }
}
