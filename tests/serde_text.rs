#![cfg(feature = "serde")]

use rstest::rstest;
use serde::{Deserialize, Serialize};

use bytetext::{Text, TextBuilder};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Reading {
    label: Text,
    value: i32,
}

#[rstest]
fn text_round_trips_as_json_string() {
    let text = Text::from("café 1.50000");
    let encoded = serde_json::to_string(&text).unwrap();
    assert_eq!(encoded, "\"café 1.50000\"");

    let decoded: Text = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, text);
}

#[rstest]
fn builder_output_embeds_in_a_struct() {
    let mut builder = TextBuilder::new();
    builder.append_str("cell ").append_i32(4);
    let reading = Reading {
        label: builder.to_text(),
        value: -12,
    };

    let encoded = serde_json::to_string(&reading).unwrap();
    assert_eq!(encoded, r#"{"label":"cell 4","value":-12}"#);

    let decoded: Reading = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, reading);
}

#[rstest]
fn invalid_utf8_serializes_as_bytes() {
    let mut builder = TextBuilder::new();
    builder.append_code_unit(0xD800);
    let encoded = serde_json::to_string(&builder.to_text()).unwrap();
    assert_eq!(encoded, "[237,160,128]");
}
