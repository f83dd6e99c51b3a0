use privfields::{Foo, Introspect};

fn main() {
    let mut a = Foo::new();

    // `a.x` and `a.hidden_method()` don't compile here; by name they are refused.
    for name in ["x", "hidden_method"] {
        match a.call(name) {
            Ok(v) => println!("a.{name} => {v}"),
            Err(err) => println!("a.{name} => {err}"),
        }
    }

    println!("a.y => {}", a.y);
    println!("a.public_method() => {}", a.public_method());

    a.y = 200;
    println!("a.y = 200; a.public_method() => {}", a.public_method());

    let visible: Vec<String> = Foo::members().iter().map(ToString::to_string).collect();
    println!("visible members of {}: {}", Foo::TYPE_NAME, visible.join(", "));
    println!("{a:?}");
}
