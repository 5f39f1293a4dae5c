//! `pkgfeed repository-url` – print the built-in feed endpoint.

use pkgfeed_core::constants;

pub fn run_repository_url() {
    println!("{}", constants::repository_url());
}
