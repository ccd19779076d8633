/// Build an AND compound from positional children and optional
/// `name = value` equalities after a `;`.
///
/// `and!(eq("a", 1), gt("b", 2); owner = "me")` is
/// `and_with([eq("a", 1), gt("b", 2)], Fields::new().field("owner", "me"))`.
#[macro_export]
macro_rules! and {
    ($($child:expr),* ; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::__compound!(and_with; $($child),* ; $($name = $value),+)
    };
    ($($child:expr),* $(,)?) => {
        $crate::__compound!(and_with; $($child),* ;)
    };
}

/// OR counterpart of [`and!`].
#[macro_export]
macro_rules! or {
    ($($child:expr),* ; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::__compound!(or_with; $($child),* ; $($name = $value),+)
    };
    ($($child:expr),* $(,)?) => {
        $crate::__compound!(or_with; $($child),* ;)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compound {
    ($ctor:ident; $($child:expr),* ; $($name:ident = $value:expr),*) => {{
        let children: ::std::vec::Vec<$crate::node::Node> =
            ::std::vec![$(::std::convert::Into::<$crate::node::Node>::into($child)),*];
        let fields = $crate::build::Fields::new()
            $(.field(::std::stringify!($name), $value))*;

        $crate::build::$ctor(children, fields)
    }};
}
