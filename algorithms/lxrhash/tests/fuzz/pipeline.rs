use bolero::check;
use lxrhash::LxrHash;

#[test]
fn fuzz_hash_is_pure() {
    let lx = LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 8, 32, 5).unwrap();

    check!().with_type::<Vec<u8>>().for_each(|data| {
        let h1 = lx.hash(data);
        let h2 = lx.hash(data);

        assert_eq!(h1.len(), 32, "digest length drifted");
        assert_eq!(h1, h2, "hash is not a pure function of its input");
        assert!(lx.verify(data, &h1), "verify() failed on its own digest");
    });
}

#[test]
fn fuzz_digest_length_tracks_configuration() {
    // Digest length is a configuration property, never an input property.
    let sizes: Vec<LxrHash> = [1u64, 13, 32]
        .iter()
        .map(|&n| LxrHash::new(99, 8, n, 3).unwrap())
        .collect();

    check!().with_type::<Vec<u8>>().for_each(|data| {
        for lx in &sizes {
            assert_eq!(lx.hash(data).len(), lx.hash_size());
        }
    });
}
