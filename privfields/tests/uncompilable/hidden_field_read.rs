fn main() {
    let foo = privfields::Foo::new();
    let _x = foo.x;
}
