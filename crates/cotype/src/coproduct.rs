//! The coproduct family: generic tagged sums of 2 to 8 branches.
//!
//! Each `CoproductN` holds exactly one value chosen from N alternative types
//! and is tagged with which alternative is active. The tag and the payload
//! cannot disagree: the enum representation makes a mismatched pair
//! unrepresentable. [`fold`](Coproduct2::fold) is the sanctioned way to
//! extract branch-specific data, since it requires one handler per branch at
//! the call site. The per-branch accessors return `Option` instead, so
//! reading the wrong branch yields an absent value rather than undefined
//! data.
//!
//! The `try_from_any` / `try_from_value` constructors bridge from runtime
//! typing to the static sum: they test the candidate branches in declaration
//! order and build the first one that matches. `from_any_safe` appends a
//! trailing `Box<dyn Any>` branch that always matches, so that form is total.

use std::any::{type_name, Any};

use crate::error::CoproductError;

//-----------------------------------------------------------------------------
// Arity-generic definition
//-----------------------------------------------------------------------------

macro_rules! define_coproducts {
    ($(
        $(#[$meta:meta])*
        $name:ident ($arity:literal) {
            $( $var:ident ($ty:ident) : $idx:literal =>
                $ctor:ident, $getter:ident, $into_getter:ident, $is:ident, $fty:ident, $handler:ident, $cand:ident; )+
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name<$($ty),+> {
            $(
                #[doc = concat!("Branch ", stringify!($idx), ".")]
                $var($ty),
            )+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Number of branches of this coproduct.
            pub const ARITY: usize = $arity;

            $(
                #[doc = concat!(
                    "Creates a coproduct with the `", stringify!($var), "` branch populated."
                )]
                pub fn $ctor(value: $ty) -> Self {
                    Self::$var(value)
                }
            )+

            /// 1-based index of the populated branch.
            pub fn index(&self) -> usize {
                match self {
                    $( Self::$var(_) => $idx, )+
                }
            }

            /// Exhaustive match: dispatches to the handler of the populated
            /// branch, passing the payload, and returns its result. The other
            /// handlers are never invoked.
            pub fn fold<R, $($fty),+>(self, $($handler: $fty),+) -> R
            where
                $( $fty: FnOnce($ty) -> R, )+
            {
                match self {
                    $( Self::$var(value) => $handler(value), )+
                }
            }

            $(
                #[doc = concat!(
                    "Returns true when the `", stringify!($var), "` branch is populated."
                )]
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$var(_))
                }

                #[doc = concat!(
                    "The `", stringify!($var),
                    "` payload, or `None` when another branch is populated."
                )]
                pub fn $getter(&self) -> Option<&$ty> {
                    if let Self::$var(value) = self {
                        Some(value)
                    } else {
                        None
                    }
                }

                #[doc = concat!(
                    "Consumes the coproduct, returning the `", stringify!($var),
                    "` payload, or `None` when another branch is populated."
                )]
                pub fn $into_getter(self) -> Option<$ty> {
                    if let Self::$var(value) = self {
                        Some(value)
                    } else {
                        None
                    }
                }
            )+
        }

        impl<$($ty: Any),+> $name<$($ty),+> {
            /// Builds the coproduct from a dynamically typed value, testing
            /// the branch types in declaration order. The first type the
            /// value downcasts to wins; when none matches, construction fails
            /// with an error naming the candidate types.
            pub fn try_from_any(value: Box<dyn Any>) -> Result<Self, CoproductError> {
                $(
                    let value = match value.downcast::<$ty>() {
                        Ok(matched) => return Ok(Self::$var(*matched)),
                        Err(unmatched) => unmatched,
                    };
                )+
                let _ = value;
                Err(CoproductError::no_matching_type(&[$(type_name::<$ty>()),+]))
            }

            /// Builds the coproduct by comparing the value against one
            /// candidate value per branch, in declaration order. The first
            /// candidate whose runtime type matches and whose value compares
            /// equal wins and becomes the payload.
            pub fn try_from_value(value: &dyn Any, $($cand: $ty),+) -> Result<Self, CoproductError>
            where
                $( $ty: PartialEq, )+
            {
                $(
                    if let Some(actual) = value.downcast_ref::<$ty>() {
                        if *actual == $cand {
                            return Ok(Self::$var($cand));
                        }
                    }
                )+
                Err(CoproductError::no_matching_value(&[$(type_name::<$ty>()),+]))
            }
        }
    )+};
}

define_coproducts! {
    /// A sum of two alternative types.
    Coproduct2 (2) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
    }

    /// A sum of three alternative types.
    Coproduct3 (3) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
        Third (T3) : 3 => create_third, third, into_third, is_third, F3, if_third, c3;
    }

    /// A sum of four alternative types.
    Coproduct4 (4) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
        Third (T3) : 3 => create_third, third, into_third, is_third, F3, if_third, c3;
        Fourth (T4) : 4 => create_fourth, fourth, into_fourth, is_fourth, F4, if_fourth, c4;
    }

    /// A sum of five alternative types.
    Coproduct5 (5) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
        Third (T3) : 3 => create_third, third, into_third, is_third, F3, if_third, c3;
        Fourth (T4) : 4 => create_fourth, fourth, into_fourth, is_fourth, F4, if_fourth, c4;
        Fifth (T5) : 5 => create_fifth, fifth, into_fifth, is_fifth, F5, if_fifth, c5;
    }

    /// A sum of six alternative types.
    Coproduct6 (6) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
        Third (T3) : 3 => create_third, third, into_third, is_third, F3, if_third, c3;
        Fourth (T4) : 4 => create_fourth, fourth, into_fourth, is_fourth, F4, if_fourth, c4;
        Fifth (T5) : 5 => create_fifth, fifth, into_fifth, is_fifth, F5, if_fifth, c5;
        Sixth (T6) : 6 => create_sixth, sixth, into_sixth, is_sixth, F6, if_sixth, c6;
    }

    /// A sum of seven alternative types.
    Coproduct7 (7) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
        Third (T3) : 3 => create_third, third, into_third, is_third, F3, if_third, c3;
        Fourth (T4) : 4 => create_fourth, fourth, into_fourth, is_fourth, F4, if_fourth, c4;
        Fifth (T5) : 5 => create_fifth, fifth, into_fifth, is_fifth, F5, if_fifth, c5;
        Sixth (T6) : 6 => create_sixth, sixth, into_sixth, is_sixth, F6, if_sixth, c6;
        Seventh (T7) : 7 => create_seventh, seventh, into_seventh, is_seventh, F7, if_seventh, c7;
    }

    /// A sum of eight alternative types.
    Coproduct8 (8) {
        First (T1) : 1 => create_first, first, into_first, is_first, F1, if_first, c1;
        Second (T2) : 2 => create_second, second, into_second, is_second, F2, if_second, c2;
        Third (T3) : 3 => create_third, third, into_third, is_third, F3, if_third, c3;
        Fourth (T4) : 4 => create_fourth, fourth, into_fourth, is_fourth, F4, if_fourth, c4;
        Fifth (T5) : 5 => create_fifth, fifth, into_fifth, is_fifth, F5, if_fifth, c5;
        Sixth (T6) : 6 => create_sixth, sixth, into_sixth, is_sixth, F6, if_sixth, c6;
        Seventh (T7) : 7 => create_seventh, seventh, into_seventh, is_seventh, F7, if_seventh, c7;
        Eighth (T8) : 8 => create_eighth, eighth, into_eighth, is_eighth, F8, if_eighth, c8;
    }
}

//-----------------------------------------------------------------------------
// Safe dynamic construction
//-----------------------------------------------------------------------------

macro_rules! impl_safe_from_any {
    ($name:ident, $fallback:ident, $( $var:ident ($ty:ident) ),+ $(,)?) => {
        impl<$($ty: Any),+> $name<$($ty,)+ Box<dyn Any>> {
            /// Builds the coproduct from a dynamically typed value with the
            /// trailing `Box<dyn Any>` branch as the always-matching last
            /// resort. The typed branches are scanned in declaration order
            /// exactly as in `try_from_any`; construction never fails.
            pub fn from_any_safe(value: Box<dyn Any>) -> Self {
                $(
                    let value = match value.downcast::<$ty>() {
                        Ok(matched) => return Self::$var(*matched),
                        Err(unmatched) => unmatched,
                    };
                )+
                log::debug!(
                    "value matched none of the typed branches; keeping it in the fallback branch"
                );
                Self::$fallback(value)
            }
        }
    };
}

impl_safe_from_any!(Coproduct3, Third, First(T1), Second(T2));
impl_safe_from_any!(Coproduct4, Fourth, First(T1), Second(T2), Third(T3));
impl_safe_from_any!(Coproduct5, Fifth, First(T1), Second(T2), Third(T3), Fourth(T4));
impl_safe_from_any!(Coproduct6, Sixth, First(T1), Second(T2), Third(T3), Fourth(T4), Fifth(T5));
impl_safe_from_any!(
    Coproduct7,
    Seventh,
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
);
impl_safe_from_any!(
    Coproduct8,
    Eighth,
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
);
