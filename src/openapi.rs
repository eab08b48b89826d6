//! Static OpenAPI 3.0 description served at `/api-docs`.

use serde_json::{Value, json};

pub fn document(port: u16) -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Trip Favorites API",
            "version": "1.0.0",
            "description": "API for managing and retrieving user favorite trips",
        },
        "servers": [
            { "url": format!("http://localhost:{port}"), "description": "Local server" }
        ],
        "paths": {
            "/trips": {
                "get": {
                    "summary": "Retrieve a list of trips",
                    "parameters": [
                        query_param("origin", "IATA code for the origin", json!({ "type": "string" })),
                        query_param("destination", "IATA code for the destination", json!({ "type": "string" })),
                        query_param(
                            "sort_by",
                            "Sort by either 'cheapest' or 'fastest'",
                            json!({ "type": "string", "enum": ["cheapest", "fastest"] }),
                        ),
                    ],
                    "responses": {
                        "200": {
                            "description": "A list of trips",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": schema_ref("Trip") }
                                }
                            }
                        },
                        "400": { "description": "Invalid request parameters" },
                        "500": { "description": "Server error" },
                    }
                }
            },
            "/favorites/add": {
                "post": {
                    "summary": "Add a trip to the user's favorite list",
                    "requestBody": json_body(json!({
                        "username": { "type": "string" },
                        "trip": schema_ref("Trip"),
                    })),
                    "responses": {
                        "201": {
                            "description": "Trip added to favorites",
                            "content": favorites_content(),
                        },
                        "400": { "description": "Missing or invalid parameters" },
                        "409": { "description": "Trip already in favorites" },
                        "500": { "description": "Server error" },
                    }
                }
            },
            "/favorites/byUsername": {
                "get": {
                    "summary": "Retrieve a user's favorite trips by username",
                    "parameters": [
                        query_param("username", "The user's username", json!({ "type": "string" })),
                    ],
                    "responses": {
                        "200": {
                            "description": "A list of the user's favorite trips",
                            "content": favorites_content(),
                        },
                        "400": { "description": "Missing username" },
                        "404": { "description": "No favorites found" },
                        "500": { "description": "Server error" },
                    }
                }
            },
            "/favorites/remove": {
                "delete": {
                    "summary": "Remove a trip from the user's favorite list",
                    "requestBody": json_body(json!({
                        "username": { "type": "string" },
                        "tripId": { "type": "string" },
                    })),
                    "responses": {
                        "200": {
                            "description": "Trip removed from favorites",
                            "content": favorites_content(),
                        },
                        "400": { "description": "Missing or invalid parameters" },
                        "404": { "description": "User or trip not found" },
                        "500": { "description": "Server error" },
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Trip": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string" },
                        "id": { "type": "string" },
                        "display_name": { "type": "string" },
                        "destination": { "type": "string" },
                        "origin": { "type": "string" },
                        "duration": { "type": "number" },
                        "cost": { "type": "number" },
                    }
                },
                "Favorites": {
                    "type": "object",
                    "properties": {
                        "username": { "type": "string" },
                        "trips": { "type": "array", "items": schema_ref("Trip") },
                    }
                }
            }
        }
    })
}

fn query_param(name: &str, description: &str, schema: Value) -> Value {
    json!({
        "in": "query",
        "name": name,
        "schema": schema,
        "required": true,
        "description": description,
    })
}

fn json_body(properties: Value) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "type": "object", "properties": properties }
            }
        }
    })
}

fn favorites_content() -> Value {
    json!({ "application/json": { "schema": schema_ref("Favorites") } })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_every_route() {
        let doc = document(3000);
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths["/trips"]["get"].is_object());
        assert!(paths["/favorites/add"]["post"].is_object());
        assert!(paths["/favorites/byUsername"]["get"].is_object());
        assert!(paths["/favorites/remove"]["delete"].is_object());
    }

    #[test]
    fn server_url_uses_configured_port() {
        let doc = document(8081);
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8081");
    }

    #[test]
    fn references_resolve_to_declared_schemas() {
        let doc = document(3000);
        let schemas = doc["components"]["schemas"].as_object().unwrap();
        assert!(schemas.contains_key("Trip"));
        assert!(schemas.contains_key("Favorites"));
        assert_eq!(
            doc["paths"]["/trips"]["get"]["parameters"][2]["schema"]["enum"],
            json!(["cheapest", "fastest"])
        );
    }
}
