/// Construct a [`Value`][crate::Value] map from a JSON-like literal.
///
/// Keys are bare identifiers. Values can be any expression convertible to a
/// `Value`, `None`, a `[..]` list, or a `{..}` nested map.
///
/// # Examples
///
/// ```
/// let v = imprint::value! {
///     name: "John Smith",
///     age: 42,
///     address: {
///         city: "Cambridge",
///     },
///     aliases: ["johnny", None],
/// };
/// ```
#[macro_export]
macro_rules! value {
    ($($tt:tt)*) => {{
        #[allow(unused_mut)]
        let mut map = $crate::value::Map::new();
        $crate::__value_entries!(map; $($tt)*);
        $crate::Value::Map(map)
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __value_entries {
    // done
    ($map:ident;) => {};

    // skip a stray comma
    ($map:ident; , $($rest:tt)*) => {
        $crate::__value_entries!($map; $($rest)*);
    };

    // nested map value
    ($map:ident; $key:ident: { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $map.insert(
            ::std::string::String::from(stringify!($key)),
            $crate::value! { $($inner)* },
        );
        $crate::__value_entries!($map; $($($rest)*)?);
    };

    // list value
    ($map:ident; $key:ident: [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $map.insert(
            ::std::string::String::from(stringify!($key)),
            $crate::__value_list!($($inner)*),
        );
        $crate::__value_entries!($map; $($($rest)*)?);
    };

    // `None` value
    ($map:ident; $key:ident: None $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from(stringify!($key)), $crate::Value::None);
        $crate::__value_entries!($map; $($($rest)*)?);
    };

    // expression value
    ($map:ident; $key:ident: $value:expr $(, $($rest:tt)*)?) => {
        $map.insert(
            ::std::string::String::from(stringify!($key)),
            $crate::Value::from($value),
        );
        $crate::__value_entries!($map; $($($rest)*)?);
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __value_list {
    ($($tt:tt)*) => {{
        #[allow(unused_mut)]
        let mut list = $crate::value::List::new();
        $crate::__value_items!(list; $($tt)*);
        $crate::Value::List(list)
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __value_items {
    // done
    ($list:ident;) => {};

    // skip a stray comma
    ($list:ident; , $($rest:tt)*) => {
        $crate::__value_items!($list; $($rest)*);
    };

    // nested map item
    ($list:ident; { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $list.push($crate::value! { $($inner)* });
        $crate::__value_items!($list; $($($rest)*)?);
    };

    // nested list item
    ($list:ident; [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $list.push($crate::__value_list!($($inner)*));
        $crate::__value_items!($list; $($($rest)*)?);
    };

    // `None` item
    ($list:ident; None $(, $($rest:tt)*)?) => {
        $list.push($crate::Value::None);
        $crate::__value_items!($list; $($($rest)*)?);
    };

    // expression item
    ($list:ident; $value:expr $(, $($rest:tt)*)?) => {
        $list.push($crate::Value::from($value));
        $crate::__value_items!($list; $($($rest)*)?);
    };
}
