use super::*;

#[test]
fn endpoint_appends_query_to_fixed_base() {
    assert_eq!(
        creature_endpoint("pikachu"),
        "https://pokeapi.co/api/v2/pokemon/pikachu"
    );
}

#[test]
fn endpoint_base_is_the_catalog_service() {
    assert!(creature_endpoint("x").starts_with(API_BASE));
}

#[test]
fn status_404_classifies_as_not_found() {
    assert_eq!(classify_status(404), LookupError::NotFound);
}

#[test]
fn other_unsuccessful_statuses_classify_as_generic() {
    assert_eq!(classify_status(500), LookupError::RequestFailed);
    assert_eq!(classify_status(403), LookupError::RequestFailed);
    assert_eq!(classify_status(301), LookupError::RequestFailed);
    assert_eq!(classify_status(0), LookupError::RequestFailed);
}
