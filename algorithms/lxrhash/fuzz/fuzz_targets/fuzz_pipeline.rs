#![no_main]

use libfuzzer_sys::fuzz_target;
use lxrhash::LxrHash;
use std::sync::OnceLock;

static SMALL: OnceLock<LxrHash> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let lx = SMALL.get_or_init(|| LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 8, 32, 5).unwrap());

    let digest = lx.hash(data);
    assert_eq!(digest.len(), 32);
    assert_eq!(digest, lx.hash(data), "hash not deterministic");
    assert!(lx.verify(data, &digest));

    // Batched execution of the same message alongside variants must agree
    // with independent hashing.
    if !data.is_empty() {
        let mut variant = data.to_vec();
        variant[0] ^= 1;
        let batched = lx.hash_batch(&[data, &variant, data]);
        assert_eq!(batched[0], digest);
        assert_eq!(batched[2], digest);
        assert_eq!(batched[1], lx.hash(&variant));
        assert_ne!(batched[0], batched[1], "bit flip did not change digest");
    }
});
