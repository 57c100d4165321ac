//! User-facing declarative macros: probe registration, queries, and manual
//! member declaration.
//!
//! `member_probe!` and `has_member!` are the two halves of the probe
//! contract: registration defines a per-name marker type in the invoking
//! scope, and the query resolves that marker by name. Keeping resolution
//! name-based is what turns contract violations into ordinary compiler
//! diagnostics (redefinition on double registration, unresolved name on
//! query-before-registration) instead of runtime surprises.

// =============================================================================
// member_probe! - Register probe names
// =============================================================================

/// Register probe names in the current scope.
///
/// For each name this defines a `<name>Probe` marker type binding the name to
/// its type-level key. The marker ident uses the name verbatim (`heading` and
/// `MAX_SPEED` mint `headingProbe` and `MAX_SPEEDProbe`), so distinct
/// spellings always mint distinct markers. Queries reference the marker
/// unqualified, so the marker must be in scope wherever `has_member!` is used
/// for that name.
///
/// # Example
///
/// ```
/// use member_probe::{has_member, member_probe, Members};
///
/// #[derive(Members)]
/// pub struct Pose {
///     pub heading: f64,
/// }
///
/// member_probe!(heading);
///
/// assert!(has_member!(Pose, heading));
/// ```
///
/// Registering the same name twice in one scope is a build-time
/// redefinition error:
///
/// ```compile_fail
/// member_probe::member_probe!(heading);
/// member_probe::member_probe!(heading);
/// ```
#[macro_export]
macro_rules! member_probe {
    ($($name:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = concat!("Probe marker for member name `", stringify!($name), "`.")]
                #[allow(dead_code, non_camel_case_types)]
                pub struct [<$name Probe>];

                impl $crate::MemberName for [<$name Probe>] {
                    type Key = $crate::member_key!($name);
                }
            )+
        }
    };
}

// =============================================================================
// has_member! - Query a registered probe
// =============================================================================

/// Evaluate, at compile time, whether a type has an accessible member with a
/// registered name. Expands to a `const bool`, so it is usable in `const`
/// contexts and static assertions.
///
/// Resolution uses inherent-const fallback: a local probe wrapper carries a
/// fallback trait const (`false`, viable for every type) and an inherent
/// const (`true`, viable only when the `HasMember` bound holds). Constant
/// path resolution prefers the inherent candidate exactly when the bound is
/// satisfied, which is the whole check; no object code is generated.
///
/// The check resolves at the macro call site, so it is meaningful for
/// concrete types only. A bare type parameter inside `fn f<T>()` always
/// takes the fallback.
///
/// # Example
///
/// ```
/// use member_probe::{has_member, member_probe, Members};
///
/// #[derive(Members)]
/// pub struct Craft {
///     pub heading: f64,
/// }
///
/// member_probe!(heading, altitude);
///
/// const HAS_HEADING: bool = has_member!(Craft, heading);
/// assert!(HAS_HEADING);
/// assert!(!has_member!(Craft, altitude));
/// ```
///
/// Querying a name that was never registered is a build-time
/// unresolved-name error:
///
/// ```compile_fail
/// struct S;
/// let _ = member_probe::has_member!(S, heading);
/// ```
///
/// Registration is spelling-exact, so querying a different casing of a
/// registered name is just as unresolved:
///
/// ```compile_fail
/// pub struct Engine;
/// member_probe::impl_member!(Engine { max_speed });
/// member_probe::member_probe!(max_speed);
/// let _ = member_probe::has_member!(Engine, MAX_SPEED);
/// ```
#[macro_export]
macro_rules! has_member {
    ($ty:ty, $name:ident) => {
        $crate::paste::paste! {{
            trait __Fallback {
                const VAL: bool = false;
            }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __Fallback for __Probe<X> {}
            impl<X: ?Sized + $crate::HasMember<$crate::Key<[<$name Probe>]>>> __Probe<X> {
                const VAL: bool = true;
            }
            __Probe::<$ty>::VAL
        }}
    };
}

// =============================================================================
// impl_member! - Manual member declaration
// =============================================================================

/// Declare members of a type by hand.
///
/// Escape hatch for members the generating macros cannot see (trait methods
/// surfaced as part of a type's API, members of foreign types you control
/// the naming contract for, and so on). Declaring a name the derive already
/// emitted for the same type overlaps and fails coherence.
///
/// # Example
///
/// ```
/// use member_probe::{has_member, impl_member, member_probe};
///
/// pub struct Legacy;
///
/// impl_member!(Legacy { heading, speed });
///
/// member_probe!(heading);
/// assert!(has_member!(Legacy, heading));
/// ```
///
/// Declaring a member twice for one type is a build-time coherence
/// conflict:
///
/// ```compile_fail
/// use member_probe::{impl_member, Members};
///
/// #[derive(Members)]
/// pub struct Pose {
///     pub heading: f64,
/// }
///
/// impl_member!(Pose { heading });
/// ```
#[macro_export]
macro_rules! impl_member {
    ($ty:ty { $($name:ident),+ $(,)? }) => {
        $(
            impl $crate::HasMember<$crate::member_key!($name)> for $ty {}
        )+
    };
    ($ty:ty, $name:ident) => {
        impl $crate::HasMember<$crate::member_key!($name)> for $ty {}
    };
}
