fn main() {
    sandbox_api::main();
}
