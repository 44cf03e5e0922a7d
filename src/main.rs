//! Trunk binary entry; all logic lives in the library.

fn main() {
    #[cfg(feature = "csr")]
    whoknows_client::start();
}
