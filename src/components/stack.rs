//! Vertical stacks, headings and tag badges

use maud::{Markup, html};

/// Stacks items vertically with a divider between neighbours.
///
/// # Arguments
///
/// * `class`: Extra class for spacing variants
/// * `items`: Rendered items in display order
pub fn divided_stack(class: &str, items: Vec<Markup>) -> Markup {
    html! {
        div class=(format!("stack stack-divided {}", class)) {
            @for (index, item) in items.into_iter().enumerate() {
                @if index > 0 {
                    hr class="divider";
                }
                (item)
            }
        }
    }
}

/// Renders the single top level heading of a page.
pub fn page_heading(text: &str) -> Markup {
    html! {
        h1 class="page-heading" { (text) }
    }
}

/// Section with a heading above its content.
pub fn section(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section class="stack page-section" id=(id) {
            h2 class="section-heading" { (heading) }
            (body)
        }
    }
}

/// Renders one outlined badge per tag, in order.
pub fn tag_list(tags: &[String]) -> Markup {
    html! {
        ul class="tag-list" {
            @for (index, tag) in tags.iter().enumerate() {
                li class="badge" data-key=(format!("stack_{}", index)) { (tag) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divided_stack_inserts_dividers_between_items() {
        // Arrange
        let items = vec![html! { p { "a" } }, html! { p { "b" } }, html! { p { "c" } }];

        // Act
        let html = divided_stack("gap-lg", items).into_string();

        // Assert
        assert_eq!(html.matches(r#"<hr class="divider">"#).count(), 2);
        assert!(html.starts_with(r#"<div class="stack stack-divided gap-lg">"#));
    }

    #[test]
    fn test_divided_stack_empty() {
        let html = divided_stack("", Vec::new()).into_string();
        assert!(!html.contains("divider\""));
    }

    #[test]
    fn test_tag_list_preserves_order() {
        // Arrange
        let tags = vec!["Rust".to_string(), "React".to_string(), "SQL".to_string()];

        // Act
        let html = tag_list(&tags).into_string();

        // Assert
        assert_eq!(html.matches("class=\"badge\"").count(), 3);
        let rust = html.find("Rust").expect("Rust badge");
        let react = html.find("React").expect("React badge");
        let sql = html.find("SQL").expect("SQL badge");
        assert!(rust < react && react < sql);
    }
}
