fn main() {
    postboard::run();
}
