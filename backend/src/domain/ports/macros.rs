//! `define_port_error!` declares a port error enum together with one
//! snake-case constructor per variant.
//!
//! Each variant carries its display message, and string-like fields accept
//! anything `Into<String>` so adapters can pass `&str` or formatted values.

macro_rules! define_port_error {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant $( [ $($field : $ty,)* ] )?);
            )*
        }
    };

    (@constructor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@constructor $variant:ident [ $($field:ident : $ty:ty,)* ]) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Offline => "store offline",
            Rejected { reason: String } => "rejected: {reason}",
            Limited { attempts: u32 } => "gave up after {attempts} attempts",
            Conflict { key: String, attempts: u32 } => "conflict on {key} after {attempts} attempts",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(StoreError::offline(), StoreError::Offline);
        assert_eq!(StoreError::offline().to_string(), "store offline");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = StoreError::rejected("email taken");
        assert_eq!(err.to_string(), "rejected: email taken");
    }

    #[test]
    fn other_field_types_pass_through() {
        let err = StoreError::limited(3_u32);
        assert_eq!(err, StoreError::Limited { attempts: 3 });
    }

    #[test]
    fn mixed_fields_keep_declaration_order() {
        let err = StoreError::conflict(String::from("users_email_key"), 2_u32);
        assert_eq!(err.to_string(), "conflict on users_email_key after 2 attempts");
    }
}
