#![no_main]

use libfuzzer_sys::fuzz_target;
use restyle::{RewriteMode, Rewriter, StylesheetLayout};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(rewriter) = Rewriter::new(StylesheetLayout::default()) else {
        return;
    };

    for mode in [RewriteMode::Insert, RewriteMode::Remove, RewriteMode::Normalize] {
        let once = rewriter.apply(mode, content).into_text(content);
        // Insert settles after one pass
        if mode == RewriteMode::Insert {
            assert!(!rewriter.apply(mode, &once).is_changed());
        }
    }
});
