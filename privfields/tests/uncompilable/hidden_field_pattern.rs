fn main() {
    let privfields::Foo { x, .. } = privfields::Foo::new();
    println!("{x}");
}
