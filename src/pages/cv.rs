//! Curriculum vitae page generation

use maud::{Markup, html};

use super::{CV_ROUTE, page_seo};
use crate::components::card::{Card, card};
use crate::components::layout::page_wrapper;
use crate::components::stack::{divided_stack, page_heading, section, tag_list};
use crate::content::{Certification, Education, Experience, Site};
use crate::markdown::LinkResolver;
use crate::path::calculate_depth;
use crate::util::date_range;

const TITLE: &str = "Curriculum Vitae";

/// Generates the CV page
///
/// Renders work experience, education and certifications as divided
/// stacks of cards, each record exactly once in source order.
///
/// # Arguments
///
/// * `site`: Site content with CV records
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site: &Site) -> Markup {
    let resolver = LinkResolver::with_depth(calculate_depth(CV_ROUTE));
    let seo = page_seo(site, TITLE, CV_ROUTE, None);
    let cv = &site.cv;

    let experiences = cv
        .experiences
        .iter()
        .enumerate()
        .map(|(index, experience)| experience_entry(experience, index, &resolver))
        .collect();
    let educations = cv
        .educations
        .iter()
        .enumerate()
        .map(|(index, education)| education_entry(education, index, &resolver))
        .collect();
    let certifications = cv
        .certifications
        .iter()
        .enumerate()
        .map(|(index, certification)| certification_entry(certification, index, &resolver))
        .collect();

    let sections = vec![
        section(
            "experience",
            "Work Experience",
            divided_stack("gap-md", experiences),
        ),
        section("education", "Education", divided_stack("gap-md", educations)),
        section(
            "certifications",
            "Certifications",
            divided_stack("gap-md", certifications),
        ),
    ];

    page_wrapper(
        &site.site,
        &seo,
        CV_ROUTE,
        &["cv.css"],
        html! {
            div class="stack gap-md" {
                (page_heading(TITLE))
                (divided_stack("gap-lg", sections))
            }
        },
    )
}

/// Renders one experience: card, descriptions, then stack badges if any.
pub fn experience_entry(experience: &Experience, index: usize, resolver: &LinkResolver) -> Markup {
    let title = format!("{} @ {}", experience.title, experience.company);
    let dates = date_range(&experience.start_date, &experience.end_date);

    html! {
        div class="stack gap-sm cv-entry" data-key=(format!("experience_{}", index)) {
            (card(&Card {
                title: &title,
                primary_text: &dates,
                secondary_text: Some(experience.location.as_str()),
                url: experience.url.as_deref(),
            }, resolver))
            @for (description_index, description) in experience.descriptions.iter().enumerate() {
                p class="cv-description" data-key=(format!("description_{}", description_index)) {
                    (description)
                }
            }
            @if !experience.stack.is_empty() {
                (tag_list(&experience.stack))
            }
        }
    }
}

pub fn education_entry(education: &Education, index: usize, resolver: &LinkResolver) -> Markup {
    let title = format!("{} @ {}", education.field, education.school);
    let dates = date_range(&education.start_date, &education.end_date);

    html! {
        div class="stack gap-sm cv-entry" data-key=(format!("education_{}", index)) {
            (card(&Card {
                title: &title,
                primary_text: &dates,
                secondary_text: Some(education.degree.as_str()),
                url: None,
            }, resolver))
        }
    }
}

pub fn certification_entry(
    certification: &Certification,
    index: usize,
    resolver: &LinkResolver,
) -> Markup {
    html! {
        div class="stack gap-sm cv-entry" data-key=(format!("certification_{}", index)) {
            (card(&Card {
                title: &certification.name,
                primary_text: &certification.date,
                secondary_text: Some(certification.issued_by.as_str()),
                url: certification.url.as_deref(),
            }, resolver))
        }
    }
}
