fn main() {
    let mut foo = privfields::Foo::new();
    foo.x = 0;
}
