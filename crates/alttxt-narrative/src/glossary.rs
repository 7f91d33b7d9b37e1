//! Static glossary appended to every long-form description.

/// Term → definition, in display order.
pub const GLOSSARY: &[(&str, &str)] = &[
    (
        "Elements",
        "elements are discrete entities, such as people, movies, or countries. They are often \
         the rows in tables, and we record attributes about them.",
    ),
    (
        "Set",
        "a set is an attribute of an element that expresses a \"part-of\", \"is-a\" or \"has-a\" \
         relationship. For example, a person can be in a club (a part-of relationship), or a \
         car can be of a type, such as a convertible (an is-a relationship). Sets are often \
         columns in a table.",
    ),
    (
        "Set sizes",
        "set sizes count how many elements are in a certain set. For example, if a dataset has \
         100 cars as elements, and 30 of the cars are convertibles, the size of the set \
         \"convertibles\" is 30.",
    ),
    (
        "Intersections",
        "sets of attributes commonly intersect. For example, a car can be in both the \
         \"electric\" set and the \"convertible\" set.",
    ),
    (
        "Intersection size",
        "the number of elements that are in a particular intersection.",
    ),
    (
        "All-set intersection",
        "a special intersection of all sets in the dataset.",
    ),
    (
        "No-set intersection",
        "a special intersection that contains the elements that are in no set in the dataset.",
    ),
    (
        "Individual-set intersection",
        "a special intersection that contains elements that are only in one set and in no \
         other.",
    ),
    (
        "Low-degree intersections",
        "intersections between only a few sets.",
    ),
    ("High-degree intersections", "intersections between many sets."),
];
