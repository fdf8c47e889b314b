fn main() {
    lake_describe::app::cli::run();
}
