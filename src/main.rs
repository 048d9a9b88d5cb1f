fn main() {
    regra::cli::run();
}
