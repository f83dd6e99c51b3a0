use privfields::{Foo, Introspect};

fn main() {
    let mut foo = Foo::new();
    for member in Foo::members() {
        assert_ne!(member.name(), "x");
        assert_ne!(member.name(), "hidden_method");
    }
    foo.set("y", 1).expect("y is visible");
    assert!(foo.get("x").is_err());
}
