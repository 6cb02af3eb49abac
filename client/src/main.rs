//! Browser entry point, built by trunk with `--features csr`.

fn main() {
    #[cfg(feature = "csr")]
    client::start();
}
