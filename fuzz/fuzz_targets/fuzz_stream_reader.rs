#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail, never panic
    let Ok(reader) = cz::reader::StreamReader::new(data) else {
        return;
    };

    for event in reader.take(10_000) {
        if event.is_err() {
            break;
        }
    }
});
