#[cfg(feature = "tracing")]
macro_rules! pftrace {
    ( $( $disp:expr ),* ) => {{
        eprint!("&&& {}:{}", file!(), line!());
        $( eprint!(" {}", $disp ); )*
        eprintln!();
    }};
}

// Arguments are still evaluated so that traced-only bindings don't turn into warnings.
#[cfg(not(feature = "tracing"))]
macro_rules! pftrace {
    ( $( $disp:expr ),* ) => {{
        $( let _ = &$disp; )*
    }};
}
