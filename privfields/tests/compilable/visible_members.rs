use privfields::Foo;

fn main() {
    let mut foo = Foo::new();
    assert_eq!(foo.y, 100);
    assert_eq!(foo.public_method(), 0);
    foo.y = 200;
    assert_eq!(foo.public_method(), 0);
}
