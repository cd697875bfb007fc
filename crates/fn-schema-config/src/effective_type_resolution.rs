/// How often the effective return type hook is applied to a function's return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectiveTypeResolution {
    /// Once. A `Future<Box<User>>` only loses its outermost wrapper.
    #[default]
    SinglePass,
    /// Until the type stops changing, at most `max_effective_type_depth` times.
    FixedPoint,
}
