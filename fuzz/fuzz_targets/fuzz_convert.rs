#![no_main]

use cz::convert::{convert, ConversionConfig};
use cz::reader::StreamReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let result = convert(data, &mut out, &ConversionConfig::default());

    // Whatever was written must be a readable stream, even after an error
    let reader = StreamReader::new(out.as_slice()).expect("stream magic missing");
    for event in reader {
        if result.is_ok() {
            event.expect("converted stream failed to decode");
        } else if event.is_err() {
            break;
        }
    }
});
