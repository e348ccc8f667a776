//! Benchmark-only crate; the measurements live under `benches/`.
