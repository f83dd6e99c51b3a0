fn main() {
    let foo = privfields::Foo::new();
    let _sum = foo.hidden_method();
}
