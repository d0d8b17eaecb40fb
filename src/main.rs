fn main() {
    csnap_pipeline::cli::run();
}
