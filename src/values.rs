//! Element types that have no natural `Ord` of their own and are sorted through an explicit
//! `is_less` predicate.

use std::fmt;

/// A number or a string in a single sequence.
///
/// There is deliberately no `Ord` impl, mixed sequences need an explicit predicate such as
/// [`lowercase_is_less`].
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Int(val) => write!(f, "{val}"),
            // 2.0 prints as "2" and 1.5 as "1.5".
            Primitive::Float(val) => write!(f, "{val}"),
            Primitive::Str(val) => f.write_str(val),
        }
    }
}

impl From<i64> for Primitive {
    fn from(val: i64) -> Self {
        Primitive::Int(val)
    }
}

impl From<f64> for Primitive {
    fn from(val: f64) -> Self {
        Primitive::Float(val)
    }
}

impl From<&str> for Primitive {
    fn from(val: &str) -> Self {
        Primitive::Str(val.to_owned())
    }
}

/// Orders by the lowercase form of the displayed value.
pub fn lowercase_is_less(a: &Primitive, b: &Primitive) -> bool {
    a.to_string().to_lowercase() < b.to_string().to_lowercase()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub first: String,
    pub last: String,
}

impl Person {
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.to_owned(),
            last: last.to_owned(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Last name first, first name breaks ties.
pub fn by_last_then_first(a: &Person, b: &Person) -> bool {
    if a.last == b.last {
        a.first < b.first
    } else {
        a.last < b.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_display() {
        assert_eq!(Primitive::Int(3).to_string(), "3");
        assert_eq!(Primitive::Float(1.5).to_string(), "1.5");
        assert_eq!(Primitive::Float(11.0).to_string(), "11");
        assert_eq!(Primitive::from("Apple").to_string(), "Apple");
    }

    #[test]
    fn lowercase_ignores_case_and_kind() {
        let apple = Primitive::from("Apple");
        let banana = Primitive::from("banana");

        assert!(lowercase_is_less(&apple, &banana));
        assert!(!lowercase_is_less(&banana, &apple));
        assert!(!lowercase_is_less(&apple, &Primitive::from("apple")));
        assert!(!lowercase_is_less(&Primitive::from("apple"), &apple));
        assert!(lowercase_is_less(&Primitive::Int(3), &apple));
        assert!(lowercase_is_less(&Primitive::Float(1.5), &Primitive::Int(2)));
    }

    #[test]
    fn person_tie_break() {
        let george = Person::new("George", "Costanza");
        let frank = Person::new("Frank", "Costanza");
        let elaine = Person::new("Elaine", "Benes");

        assert!(by_last_then_first(&frank, &george));
        assert!(!by_last_then_first(&george, &frank));
        assert!(by_last_then_first(&elaine, &frank));
        assert!(!by_last_then_first(&george, &george));
    }
}
