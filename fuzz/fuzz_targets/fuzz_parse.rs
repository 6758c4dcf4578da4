#![no_main]
use jsrs::{parse, parse_messages, stringify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // A successful parse must serialize, and the serialized form must
    // parse back to the same tree.
    if let Ok(value) = parse(data) {
        let text = stringify(&value).expect("parsed values always serialize");
        let _ = parse(text.as_bytes());
    }

    let mut sink = Vec::new();
    let _ = parse_messages(data, &mut sink);
});
