use serde::Deserialize;

use crate::error::AttrError;
use crate::icon::IconScale;

/// Declarative construction record for a [`ClearField`](crate::ClearField),
/// the equivalent of inflating the widget from a layout description.
///
/// Every attribute is optional; the icon scale defaults to `normal`. Unknown
/// keys and out-of-range scales are rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldAttrs {
    pub text: String,
    pub placeholder: Option<String>,
    pub icon_scale: IconScale,
    pub trailing_padding: u16,
}

impl FieldAttrs {
    /// Parses an attribute set from a JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, AttrError> {
        serde_json::from_str(raw).map_err(AttrError::from_parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_attribute_set() {
        let attrs = FieldAttrs::from_json(
            r#"{
                "text": "hello",
                "placeholder": "type here",
                "icon_scale": "big",
                "trailing_padding": 2
            }"#,
        )
        .unwrap();
        assert_eq!(attrs.text, "hello");
        assert_eq!(attrs.placeholder.as_deref(), Some("type here"));
        assert_eq!(attrs.icon_scale, IconScale::Big);
        assert_eq!(attrs.trailing_padding, 2);
    }

    #[test]
    fn omitted_attributes_take_defaults() {
        let attrs = FieldAttrs::from_json("{}").unwrap();
        assert_eq!(attrs, FieldAttrs::default());
        assert_eq!(attrs.icon_scale, IconScale::Normal);
    }

    #[test]
    fn accepts_divisor_constants_for_the_scale() {
        let attrs = FieldAttrs::from_json(r#"{"icon_scale": 3}"#).unwrap();
        assert_eq!(attrs.icon_scale, IconScale::Small);
    }

    #[test]
    fn rejects_out_of_range_scales() {
        let err = FieldAttrs::from_json(r#"{"icon_scale": 5}"#).unwrap_err();
        assert!(err.to_string().contains("invalid field attributes"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(FieldAttrs::from_json(r#"{"button_size": 2}"#).is_err());
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(FieldAttrs::from_json("not json").is_err());
    }
}
