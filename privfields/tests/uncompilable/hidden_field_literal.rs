fn main() {
    let _foo = privfields::Foo { x: 0, y: 100 };
}
