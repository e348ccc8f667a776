#![no_main]

use libfuzzer_sys::fuzz_target;
use lxrhash::LxrHash;
use std::sync::OnceLock;

static SMALL: OnceLock<LxrHash> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let lx = SMALL.get_or_init(|| LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 8, 32, 5).unwrap());

    // First byte picks the prefix/suffix split; the rest is the message.
    let msg = &data[1..];
    let prefix_len = data[0] as usize % (msg.len() + 1);

    let primed = lx.pre_hash(&msg[..prefix_len]);
    let replayed = lx.post_hash(msg, prefix_len, &primed);
    assert_eq!(replayed, lx.hash(msg), "pre/post split diverged");
});
