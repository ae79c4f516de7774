//! End-to-end rendering of annotated classes into client services

use std::path::PathBuf;

use apistub_core::descriptor::HttpVerb;
use apistub_core::render::method::build_url;
use apistub_core::{parse, Catalog, ServiceRenderer};

fn catalog(yaml: &str) -> Catalog {
    Catalog::from_str(yaml).expect("valid catalog")
}

fn fixture_path() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("tests/fixtures/catalog/items.yaml")
}

#[test]
fn get_with_single_route_parameter() {
    let catalog = catalog(
        r#"
classes:
  - name: UsersController
    methods:
      - name: getUser
        doc: "/** @api */"
        parameters:
          - name: id
"#,
    );
    let class = parse("UsersController", &catalog).unwrap();
    let method = &class.methods[0];
    assert_eq!(method.http_verb, HttpVerb::Get);

    let out = ServiceRenderer::default().render_method(method, "/api");
    let expected = "/**
 * @param {*} id
 * @returns {Promise}
 */
service.getUser = function (id) {
    return (apiClient.get('/api/user/:id', [id]));
};";
    assert_eq!(out, expected);
}

#[test]
fn post_with_payload_and_output_fields() {
    let catalog = catalog(
        r#"
classes:
  - name: ItemsController
    methods:
      - name: postItem
        doc: "/**\n * @api\n * @payload array\n * @output id:int\n * @output name:string\n */"
"#,
    );
    let class = parse("ItemsController", &catalog).unwrap();
    let method = &class.methods[0];
    assert_eq!(method.http_verb, HttpVerb::Post);

    let out = ServiceRenderer::default().render_method(method, "/api");
    let expected = "/**
 * @param {Object} payload Request body sent with the call.
 * @returns {PostItemPromise}
 */
service.postItem = function (payload) {
    return /** @type {PostItemPromise} */ (apiClient.post('/api/item', null, payload));
};

/**
 * @typedef {Object} PostItemResult
 * @property {number} id
 * @property {string} name
 */

/**
 * @typedef {Promise<PostItemResult>} PostItemPromise
 */";
    assert_eq!(out, expected);
}

#[test]
fn query_parameters_follow_route_parameters() {
    let catalog = catalog(
        r#"
classes:
  - name: ItemsController
    methods:
      - name: getItems
        doc: "/**\n * @api\n * @query string category\n * @query int page\n */"
        parameters:
          - name: id
"#,
    );
    let class = parse("ItemsController", &catalog).unwrap();
    let method = &class.methods[0];

    assert_eq!(build_url(method, "/api"), "/api/items/:id?category=:1&page=:2");
    let out = ServiceRenderer::default().render_method(method, "/api");
    assert!(out.contains("service.getItems = function (id, queryParams) {"));
    assert!(out.contains(" * @param {number} [queryParams.page]\n"));
    assert!(out.contains(
        "apiClient.get('/api/items/:id?category=:1&page=:2', [id, queryParams.category, queryParams.page])"
    ));
}

#[test]
fn alias_renames_client_but_not_url() {
    let catalog = catalog(
        r#"
classes:
  - name: ItemsController
    methods:
      - name: getOne
        doc: "/**\n * @api\n * @alias fetchOne\n */"
"#,
    );
    let class = parse("ItemsController", &catalog).unwrap();
    let method = &class.methods[0];
    assert_eq!(method.client_side_name, "fetchOne");
    assert_eq!(method.server_side_name, "getOne");

    let out = ServiceRenderer::default().render_method(method, "/api");
    assert!(out.contains("service.fetchOne = function () {"));
    assert!(out.contains("apiClient.get('/api/one')"));
}

#[tokio::test]
async fn fixture_class_renders_every_exposed_method() {
    let catalog = Catalog::from_file(fixture_path()).await.unwrap();
    let class = parse("ItemsController", &catalog).unwrap();

    let names: Vec<_> = class
        .methods
        .iter()
        .map(|m| m.client_side_name.as_str())
        .collect();
    assert_eq!(names, vec!["getItem", "postItem", "getCategoryItems", "removeItem"]);
    assert_eq!(class.description, "Manage catalogue items.");

    let text = ServiceRenderer::default().render_service(
        "ItemsController",
        "https://shop.example.com/api/",
        &class,
        "shop.items",
    );

    assert!(text.starts_with("/*\n * THIS FILE IS GENERATED AUTOMATICALLY."));
    assert!(text.contains(" * Source class: ItemsController\n"));
    assert!(text.contains("function ItemsServiceImpl(apiClient) {"));
    assert!(text.ends_with(
        "angular.module('shop.items').service('ItemsService', ['apiClient', ItemsServiceImpl]);\n"
    ));

    // getItem: description, typed parameter, return description with inline markup
    assert!(text.contains("     * Fetch one item.\n     *\n     * @param {number} id Item id\n"));
    assert!(text.contains("     * @returns {Promise} The item, see {@link Item}\n"));

    // postItem: payload field and output typedefs
    assert!(text.contains("     * @param {string} payload.name Display name\n"));
    assert!(text.contains("     * @property {number} id Identifier of the new item\n"));
    assert!(text.contains(
        "(apiClient.post('https://shop.example.com/api/item', null, payload))"
    ));

    // removeItem: optional parameters with defaults, URL from the server-side name
    assert!(text.contains("     * @param {boolean} [force=false] Skip the trash\n"));
    assert!(text.contains("     * @param {array} [tags=[]]\n"));
    assert!(text.contains("    service.removeItem = function (id, force, tags) {"));
    assert!(text.contains(
        "apiClient.delete('https://shop.example.com/api/item/:id/:force/:tags', [id, force, tags])"
    ));

    assert!(!text.contains("make"));
    assert!(!text.contains("helper"));
    assert!(!text.contains("\n\n\n"));
}
