//! Generator for LXRHash interop vectors
//!
//! Prints the canonical fixture digests (empty, "a", "abc", one million zero
//! bytes, and the 512-byte Lorem-ipsum block) for the standard instance.
//! Freeze the output of a trusted build as the cross-implementation check:
//! two implementations interoperate only if they agree on all five lines.
//!
//! Building the 32 MiB table takes a while; pass a smaller exponent to
//! experiment: `cargo run --release --example print_vectors -- 16`

#![allow(clippy::unwrap_used)]

use lxrhash::{constants, LxrHash};

const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nunc \
dapibus pretium urna, mollis aliquet elit cursus ac. Sed sodales, erat ut volutpat \
viverra, ante urna pretium est, non congue augue dui sed purus. Mauris vitae mollis \
metus. Fusce convallis faucibus tempor. Maecenas hendrerit, urna eu lobortis \
venenatis, neque leo consequat enim, nec placerat tellus eros quis diam. Donec quis \
vestibulum eros. Maecenas id vulputate justo. Quisque nec feugiat nisi, lacinia \
pulvinar felis. Pellentesque habitant sed.";

fn main() {
    let bits = std::env::args()
        .nth(1)
        .map_or(constants::DEFAULT_MAP_SIZE_BITS, |arg| {
            arg.parse().expect("map size exponent")
        });

    eprintln!("building 2^{bits} byte map...");
    let lx = LxrHash::new(
        constants::DEFAULT_SEED,
        bits,
        constants::DEFAULT_HASH_SIZE,
        constants::DEFAULT_PASSES,
    )
    .unwrap();

    let vectors: [(&str, Vec<u8>); 5] = [
        ("empty", Vec::new()),
        ("a", b"a".to_vec()),
        ("abc", b"abc".to_vec()),
        ("zeros-1M", vec![0u8; 1_000_000]),
        ("lorem-512", LOREM.to_vec()),
    ];

    println!(
        "seed={:#018x} map_size_bits={} hash_size={} passes={}",
        lx.seed(),
        lx.map_size_bits(),
        lx.hash_size(),
        lx.passes()
    );
    for (name, input) in &vectors {
        println!("{name:<9} {}", hex::encode(lx.hash(input)));
    }
}
