#![no_main]

use libfuzzer_sys::fuzz_target;
use logsift::parsers::{parse_line, ParseFailure};

const MAX_LINE_LEN: usize = 4096;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_LINE_LEN {
        return;
    }
    let line = String::from_utf8_lossy(data);

    match parse_line(Some(&line)) {
        Ok(record) => {
            // Rendering drops sub-second precision but keeps level and message
            let rendered = record.to_string();
            let reparsed = parse_line(Some(&rendered)).expect("rendered record parses");
            assert_eq!(reparsed.level(), record.level());
            assert_eq!(reparsed.message(), record.message());
            assert!(!line.trim().is_empty());
        }
        Err(ParseFailure::Blank) => assert!(line.trim().is_empty()),
        Err(_) => {}
    }
});
