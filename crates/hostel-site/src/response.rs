//! Response assembly: template expansion plus status mapping.

use hostel_render::expand;

use crate::adapter::TemplateData;
use crate::context::RenderContext;
use crate::error::RenderError;

/// A fully assembled HTTP payload for a content request.
///
/// Only two outcomes ever reach a client from the render path: 200
/// with rendered HTML, or 404 with the same template rendered around
/// the not-found sentinels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Expand the context into its theme template and assemble the
/// response.
///
/// A fresh [`TemplateData`] adapter is created per call, so rendering
/// the same unmutated context twice yields identical output.
pub fn render(ctx: &RenderContext) -> Result<PageResponse, RenderError> {
    let mut data = TemplateData::new(ctx);
    let body = expand(&ctx.template, &mut data)?;
    Ok(PageResponse {
        status: if ctx.page.is_not_found() { 404 } else { 200 },
        content_type: "text/html",
        body,
    })
}

#[cfg(test)]
mod tests {
    use hostel_store::{NavEntry, ThemeContentItem};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::{NOT_FOUND_TITLE, PageBody};

    fn context(template: &str) -> RenderContext {
        RenderContext {
            template: template.to_owned(),
            items: vec![ThemeContentItem {
                key: "tagline".to_owned(),
                value: "Welcome".to_owned(),
            }],
            page: PageBody::Found {
                title: "Hi".to_owned(),
                html: "<strong>bold</strong>".to_owned(),
            },
            language: "en".to_owned(),
            nav: vec![
                NavEntry {
                    url: "/a".to_owned(),
                    title: "Home".to_owned(),
                },
                NavEntry {
                    url: "/b".to_owned(),
                    title: "About".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn test_found_page_renders_with_status_200() {
        let ctx = context("<h1>{{title}}</h1>{{content}}");
        let response = render(&ctx).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "text/html");
        assert_eq!(response.body, "<h1>Hi</h1><strong>bold</strong>");
    }

    #[test]
    fn test_not_found_renders_same_template_with_status_404() {
        let mut ctx = context("{{title}}");
        ctx.page = PageBody::NotFound;
        let response = render(&ctx).unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body, NOT_FOUND_TITLE);
    }

    #[test]
    fn test_nav_section_iterates_while_title_outside_is_page_title() {
        let ctx = context("{{#nav}}{{title}}{{/nav}}|{{title}}");
        let response = render(&ctx).unwrap();
        assert_eq!(response.body, "HomeAbout|Hi");
    }

    #[test]
    fn test_nav_urls_render_inside_section() {
        let ctx = context(r#"{{#nav}}<a href="{{url}}">{{title}}</a>{{/nav}}"#);
        let response = render(&ctx).unwrap();
        assert_eq!(
            response.body,
            r#"<a href="/a">Home</a><a href="/b">About</a>"#
        );
    }

    #[test]
    fn test_theme_item_and_language_interpolation() {
        let ctx = context("{{tagline}} ({{language}})");
        let response = render(&ctx).unwrap();
        assert_eq!(response.body, "Welcome (en)");
    }

    #[test]
    fn test_unknown_variable_renders_empty() {
        let ctx = context("[{{does_not_exist}}]");
        let response = render(&ctx).unwrap();
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn test_render_is_idempotent() {
        let ctx = context("{{#nav}}{{title}},{{/nav}}{{title}}");
        let first = render(&ctx).unwrap();
        let second = render(&ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.body, "Home,About,Hi");
    }

    #[test]
    fn test_malformed_template_fails_without_partial_output() {
        let ctx = context("{{#nav}}{{title}}");
        assert!(render(&ctx).is_err());
    }
}
