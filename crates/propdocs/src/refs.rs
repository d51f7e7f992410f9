use crate::model::ForwardsRefTo;

/// Maps a conformance test's `refInstanceof` onto where the ref ends up.
pub fn classify(ref_instance: Option<&str>) -> ForwardsRefTo {
    match ref_instance {
        None => ForwardsRefTo::None,
        Some("React.Component") => ForwardsRefTo::ComponentClass,
        Some("Object") => ForwardsRefTo::ImperativeHandle,
        Some(element) => ForwardsRefTo::DomElement {
            element: element.to_string(),
        },
    }
}
