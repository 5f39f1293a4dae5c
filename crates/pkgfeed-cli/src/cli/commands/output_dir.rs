//! `pkgfeed output-dir` – print the built-in output directory.

use pkgfeed_core::constants;

pub fn run_output_dir(native: bool) {
    if native {
        println!("{}", constants::output_dir_path().display());
    } else {
        println!("{}", constants::output_dir());
    }
}
