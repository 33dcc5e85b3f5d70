//! Macros for ergonomic configuration.

/// Build a [`Config`](crate::Config) from a literal state table.
///
/// # Example
///
/// ```
/// use waymark::{fsm_config, Baseline};
///
/// let config = fsm_config! {
///     initial: "draft",
///     baseline: Baseline::Initial,
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published", "reject" => "draft" },
///         "published" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.states["review"].target("reject"), Some("draft"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        $(baseline: $baseline:expr,)?
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::StateTable::new();
        $(
            states.insert(
                ::std::string::String::from($state),
                $crate::StateSpec::new() $(.on($event, $target))*,
            );
        )*
        #[allow(unused_mut)]
        let mut config = $crate::Config::new($initial, states);
        $(
            config = config.with_baseline($baseline);
        )?
        config
    }};
}
