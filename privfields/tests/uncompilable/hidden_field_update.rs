fn main() {
    let _foo = privfields::Foo { y: 5, ..privfields::Foo::new() };
}
