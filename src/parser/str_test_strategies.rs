use proptest::prelude::*;


pub(crate) fn integer_strategy() -> impl Strategy<Value = String> {
    (0u32..=1000).prop_map(|n| n.to_string())
}

pub(crate) fn decimal_strategy() -> impl Strategy<Value = String> {
    (0u32..=1000, "[0-9]{0,3}")
        .prop_map(|(int, frac)| format!("{}.{}", int, frac))
}

pub(crate) fn parenthesized_strategy(inner: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    inner.prop_map(|expr| format!("({})", expr))
}

pub(crate) fn negated_strategy(inner: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    inner.prop_map(|expr| format!("-{}", expr))
}

pub(crate) fn binary_operation_strategy(
    left: impl Strategy<Value = String>,
    right: impl Strategy<Value = String>
) -> impl Strategy<Value = String> {
    (
        left,
        prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("^")],
        right,
        prop_oneof![Just(""), Just(" ")]
    ).prop_map(|(l, op, r, pad)| format!("{}{}{}{}{}", l, pad, op, pad, r))
}

pub(crate) fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        integer_strategy(),
        decimal_strategy(),
    ];

    leaf.prop_recursive(4, 32, 10, |inner| {
        prop_oneof![
            parenthesized_strategy(inner.clone()),
            negated_strategy(inner.clone()),
            binary_operation_strategy(inner.clone(), inner),
        ]
    })
}
