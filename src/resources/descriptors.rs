//! Built-in resource descriptors
//!
//! The five collections this source extracts, declared as plain data.
//! Property order follows the order fields appear in API responses.

use super::types::{ContentType, Resource};
use crate::schema::{Property, Schema};

/// Confluence user groups
pub fn groups() -> Resource {
    Resource {
        name: "groups",
        path: "/group",
        primary_keys: &["id"],
        expand: &[],
        content_type: None,
        schema: Schema::new([
            ("id", Property::string()),
            ("name", Property::string()),
            ("type", Property::string()),
            ("_links", Property::object([("self", Property::string())])),
        ]),
    }
}

/// Confluence spaces with permissions, icon, and description
pub fn spaces() -> Resource {
    Resource {
        name: "spaces",
        path: "/space",
        primary_keys: &["id"],
        expand: &[],
        content_type: None,
        schema: Schema::new([
            ("id", Property::integer()),
            ("key", Property::string()),
            ("name", Property::string()),
            ("type", Property::string()),
            ("status", Property::string()),
            (
                "permissions",
                Property::array(Property::object([
                    (
                        "subjects",
                        Property::object([
                            (
                                "user",
                                Property::object([(
                                    "results",
                                    Property::array(Property::object([
                                        ("accountId", Property::string()),
                                        ("email", Property::string()),
                                        ("type", Property::string()),
                                        ("publicName", Property::string()),
                                    ])),
                                )]),
                            ),
                            (
                                "group",
                                Property::object([(
                                    "results",
                                    Property::array(Property::object([
                                        ("id", Property::string()),
                                        ("name", Property::string()),
                                        ("type", Property::string()),
                                    ])),
                                )]),
                            ),
                        ]),
                    ),
                    ("anonymousAccess", Property::boolean()),
                    ("unlicensedAccess", Property::boolean()),
                    (
                        "operation",
                        Property::object([
                            ("operation", Property::string()),
                            ("targetType", Property::string()),
                        ]),
                    ),
                ])),
            ),
            ("icon", icon()),
            (
                "description",
                Property::object([
                    (
                        "plain",
                        Property::object([
                            ("representation", Property::string()),
                            ("value", Property::string()),
                        ]),
                    ),
                    (
                        "view",
                        Property::object([
                            ("representation", Property::string()),
                            ("value", Property::string()),
                        ]),
                    ),
                ]),
            ),
            (
                "_expandable",
                Property::object([("homepage", Property::string())]),
            ),
            (
                "_links",
                Property::object([
                    ("self", Property::string()),
                    ("webui", Property::string()),
                ]),
            ),
        ]),
    }
}

/// Installed site themes
pub fn themes() -> Resource {
    Resource {
        name: "themes",
        path: "/settings/theme",
        primary_keys: &["themeKey"],
        expand: &[],
        content_type: None,
        schema: Schema::new([
            ("themeKey", Property::string()),
            ("name", Property::string()),
            ("description", Property::string()),
            ("icon", icon()),
        ]),
    }
}

/// Pages (the `page` content sub-kind)
pub fn pages() -> Resource {
    Resource {
        name: "pages",
        path: "/content",
        primary_keys: &["id"],
        expand: &[],
        content_type: Some(ContentType::Page),
        schema: content_schema(),
    }
}

/// Blogposts (the `blogpost` content sub-kind)
pub fn blogposts() -> Resource {
    Resource {
        name: "blogposts",
        path: "/content",
        primary_keys: &["id"],
        expand: &[],
        content_type: Some(ContentType::Blogpost),
        schema: content_schema(),
    }
}

/// Shared row schema for the `/content` endpoint
fn content_schema() -> Schema {
    Schema::new([
        ("id", Property::string()),
        ("title", Property::string()),
        ("type", Property::string()),
        ("status", Property::string()),
        (
            "history",
            Property::object([
                ("latest", Property::boolean()),
                ("createdBy", user_ref()),
                ("createdDate", Property::timestamp()),
                (
                    "contributors",
                    Property::object([("publishers", user_collection())]),
                ),
                ("previousVersion", edit_metadata()),
            ]),
        ),
        ("version", edit_metadata()),
        (
            "descendants",
            Property::object([(
                "results",
                Property::array(Property::object([
                    ("id", Property::string()),
                    ("title", Property::string()),
                    ("type", Property::string()),
                    ("status", Property::string()),
                ])),
            )]),
        ),
        (
            "restrictions",
            Property::object([("operations", Property::string())]),
        ),
        (
            "_expandable",
            Property::object([
                ("container", Property::string()),
                ("space", Property::string()),
            ]),
        ),
        (
            "_links",
            Property::object([
                ("self", Property::string()),
                ("tinyui", Property::string()),
                ("editui", Property::string()),
                ("webui", Property::string()),
            ]),
        ),
    ])
}

/// User reference as embedded in content bodies
fn user_ref() -> Property {
    Property::object([
        ("type", Property::string()),
        ("accountId", Property::string()),
        ("email", Property::string()),
        ("publicName", Property::string()),
    ])
}

/// A set of contributing users plus their user keys
fn user_collection() -> Property {
    Property::object([
        ("users", Property::array(user_ref())),
        ("userKeys", Property::array(Property::string())),
    ])
}

/// Version metadata shared by `version` and `history.previousVersion`
fn edit_metadata() -> Property {
    Property::object([
        ("by", user_ref()),
        ("when", Property::timestamp()),
        ("friendlyWhen", Property::string()),
        ("message", Property::string()),
        ("number", Property::integer()),
        ("minorEdit", Property::boolean()),
        ("collaborators", user_collection()),
    ])
}

/// Icon shape shared by spaces and themes
fn icon() -> Property {
    Property::object([
        ("path", Property::string()),
        ("width", Property::integer()),
        ("height", Property::integer()),
        ("isDefault", Property::boolean()),
    ])
}
