use bolero::check;
use lxrhash::LxrHash;

#[test]
fn fuzz_pre_post_split_equivalence() {
    let lx = LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 8, 32, 5).unwrap();

    check!()
        .with_type::<(Vec<u8>, u8)>()
        .for_each(|(data, split)| {
            // Split anywhere in the message, including the two ends.
            let prefix_len = *split as usize % (data.len() + 1);

            let primed = lx.pre_hash(&data[..prefix_len]);
            let replayed = lx.post_hash(data, prefix_len, &primed);

            assert_eq!(
                replayed,
                lx.hash(data),
                "pre/post diverged at split {prefix_len} of {}",
                data.len()
            );
        });
}

#[test]
fn fuzz_batch_equivalence() {
    let lx = LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 8, 32, 5).unwrap();

    check!()
        .with_type::<Vec<Vec<u8>>>()
        .for_each(|inputs| {
            let views: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();
            let batched = lx.hash_batch(&views);

            assert_eq!(batched.len(), views.len());
            for (view, digest) in views.iter().zip(&batched) {
                assert_eq!(digest, &lx.hash(view), "batched digest diverged");
            }
        });
}
