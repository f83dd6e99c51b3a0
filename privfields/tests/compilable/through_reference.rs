use privfields::Foo;

fn raise(foo: &mut Foo, by: i64) -> i64 {
    foo.y += by;
    foo.public_method()
}

fn main() {
    let mut foo = Foo::default();
    let copy = foo.clone();
    assert_eq!(raise(&mut foo, 100), 0);
    assert_eq!(foo.y, 200);
    assert_eq!(copy.y, 100);
    assert_eq!(format!("{foo:?}"), "Foo { y: 200, .. }");
}
