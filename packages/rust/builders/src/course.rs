//! Course node builder.
//!
//! The densest mapping in the system: one `Course` node per course row,
//! with the composite-key topics join (`teaches`), nested audience /
//! course-instance / offer / location sub-objects, and the conditional
//! fields (`courseCode`, second course mode, audience geographic area).

use serde_json::{Value, json};

use coursemark_shared::{CategoryPage, Conventions, CourseRow};
use coursemark_tables::TableStore;

use crate::organization_id;

/// Build one `Course` node.
///
/// Absent scalar fields pass through as null. `teaches` contains only the
/// present topic slots, in column order 1..8. `courseCode` appears only
/// when present and not the `"N/A"` sentinel.
pub fn build(
    store: &TableStore,
    conventions: &Conventions,
    page: &CategoryPage,
    course: &CourseRow,
) -> Value {
    let teaches: Vec<&str> = store
        .topics_for_course(&course.category_id, course.course_position)
        .map(|row| row.topics().collect())
        .unwrap_or_default();

    let mut course_mode = vec![course.course_mode_1.clone()];
    if let Some(mode) = &course.course_mode_2 {
        course_mode.push(Some(mode.clone()));
    }

    let mut audience = json!({
        "@type": "Audience",
        "audienceType": &course.course_audience_type
    });
    if let Some(geo_type) = &course.geographic_type {
        audience["geographicArea"] = json!({
            "@type": geo_type,
            "name": &course.geographic_name
        });
    }

    let mut node = json!({
        "@type": "Course",
        "position": course.course_position,
        "name": &course.course_name,
        "alternateName": &course.course_alternate_name,
        "description": &course.course_description,
        "url": &course.course_url,
        "educationalCredentialAwarded": &course.course_credential,
        "educationalLevel": &course.course_level,
        "timeRequired": &course.course_duration_iso8601,
        "abstract": &course.course_abstract,
        "coursePrerequisites": &course.course_prerequisites,
        "occupationalCredentialAwarded": &course.course_benefits,
        "teaches": teaches,
        "audience": audience,
        "availableLanguage": &course.course_language,
        "hasCourseInstance": {
            "@type": "CourseInstance",
            "courseMode": course_mode,
            "courseWorkload": &course.course_workload_iso8601,
            "courseSchedule": {
                "@type": "Schedule",
                "scheduleTimezone": &course.course_timezone,
                "repeatFrequency": &conventions.schedule_repeat_frequency,
                "byDay": &conventions.schedule_by_day
            },
            "instructor": {
                "@type": "Organization",
                "name": &course.course_instructor_org
            }
        },
        "offers": {
            "@type": "Offer",
            "category": &course.offer_category,
            "priceCurrency": &conventions.price_currency,
            "availability": &conventions.offer_availability,
            "availabilityStarts": &course.offer_availability_starts,
            "validFrom": &course.offer_valid_from,
            "url": &course.course_url,
            "eligibleRegion": {
                "@type": &course.eligible_region_type,
                "name": &course.eligible_region_name,
                "address": {
                    "@type": "PostalAddress",
                    "addressRegion": &course.eligible_region_code,
                    "addressCountry": &conventions.address_country
                }
            },
            "deliveryMethod": &conventions.delivery_method
        },
        "provider": {
            "@id": organization_id(store)
        },
        "isPartOf": {
            "@id": format!("{}#catalog", page.category_page_url)
        },
        "inLanguage": &course.course_in_language,
        "locationCreated": {
            "@type": &course.location_created_type,
            "name": &course.location_created_name,
            "address": {
                "@type": "PostalAddress",
                "addressRegion": &course.location_created_region,
                "addressCountry": &conventions.address_country
            }
        },
        "educationalUse": &course.course_educational_use,
        "learningResourceType": &course.course_learning_resource_type,
        "interactivityType": &conventions.interactivity_type,
        "typicalAgeRange": &course.course_age_range
    });

    if let Some(code) = course.effective_course_code() {
        node["courseCode"] = json!(code);
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fixture() -> (TableStore, Conventions) {
        let store = TableStore::load(Path::new("../../../fixtures/csv")).unwrap();
        (store, Conventions::default())
    }

    fn build_course(store: &TableStore, conv: &Conventions, position: i64) -> Value {
        let page = store.category_page("CAT1").unwrap();
        let course = store
            .courses("CAT1")
            .into_iter()
            .find(|c| c.course_position == position)
            .unwrap();
        build(store, conv, page, course)
    }

    #[test]
    fn teaches_joined_by_composite_key_in_column_order() {
        let (store, conv) = fixture();
        let node = build_course(&store, &conv, 1);

        let teaches = node["teaches"].as_array().unwrap();
        assert_eq!(teaches.len(), 3);
        assert_eq!(teaches[0], "Safety");
        assert_eq!(teaches[2], "Joints");
    }

    #[test]
    fn course_code_present_when_not_sentinel() {
        let (store, conv) = fixture();
        let node = build_course(&store, &conv, 1);
        assert_eq!(node["courseCode"], "WLD-101");
    }

    #[test]
    fn course_code_omitted_for_sentinel() {
        let (store, conv) = fixture();
        // Position 2 carries the "N/A" sentinel: no courseCode key at all,
        // not a null value.
        let node = build_course(&store, &conv, 2);
        assert!(node.get("courseCode").is_none());
    }

    #[test]
    fn course_code_omitted_when_absent() {
        let (store, conv) = fixture();
        let page = store.category_page("CAT1").unwrap();
        let mut course = store.courses("CAT1")[0].clone();
        course.course_code = None;

        let node = build(&store, &conv, page, &course);
        assert!(node.get("courseCode").is_none());
    }

    #[test]
    fn second_course_mode_appended_when_present() {
        let (store, conv) = fixture();

        let with_second = build_course(&store, &conv, 1);
        let modes = with_second["hasCourseInstance"]["courseMode"]
            .as_array()
            .unwrap();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0], "Online");
        assert_eq!(modes[1], "Onsite");

        let without_second = build_course(&store, &conv, 2);
        let modes = without_second["hasCourseInstance"]["courseMode"]
            .as_array()
            .unwrap();
        assert_eq!(modes.len(), 1);
        assert_eq!(modes[0], "Onsite");
    }

    #[test]
    fn geographic_area_only_when_type_present() {
        let (store, conv) = fixture();

        let with_geo = build_course(&store, &conv, 1);
        assert_eq!(with_geo["audience"]["geographicArea"]["@type"], "State");
        assert_eq!(with_geo["audience"]["geographicArea"]["name"], "Illinois");

        let without_geo = build_course(&store, &conv, 2);
        assert!(without_geo["audience"].get("geographicArea").is_none());
    }

    #[test]
    fn fixed_schedule_and_offer_conventions() {
        let (store, conv) = fixture();
        let node = build_course(&store, &conv, 1);

        let schedule = &node["hasCourseInstance"]["courseSchedule"];
        assert_eq!(schedule["repeatFrequency"], "P1D");
        assert_eq!(schedule["byDay"].as_array().unwrap().len(), 7);

        let offer = &node["offers"];
        assert_eq!(offer["priceCurrency"], "USD");
        assert_eq!(offer["availability"], "https://schema.org/InStock");
        assert_eq!(offer["deliveryMethod"], "OnlineOnly");
        assert_eq!(
            offer["eligibleRegion"]["address"]["addressCountry"],
            "US"
        );

        assert_eq!(node["interactivityType"], "mixed");
    }

    #[test]
    fn absent_scalars_serialize_as_null() {
        let (store, conv) = fixture();
        let page = store.category_page("CAT2").unwrap();
        let course = store.courses("CAT2")[0];
        let node = build(&store, &conv, page, course);

        // alternate name and abstract are blank in the fixture.
        assert!(node["alternateName"].is_null());
        assert!(node["abstract"].is_null());
        // The key itself is present.
        assert!(node.get("alternateName").is_some());
    }
}
