use crate::domain::model::{FilterSet, Job};

/// Escapes data-derived text for safe embedding in markup and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_tag_row(job: &Job) -> String {
    job.tags()
        .iter()
        .map(|tag| {
            format!(
                r#"<button class="tag" data-tag="{0}">{0}</button>"#,
                escape(tag)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one job posting as a self-contained card fragment. Tag buttons
/// carry their value in `data-tag`; the row is duplicated below a separator
/// to mirror the original card layout, with identical click semantics.
pub fn render_job_card(job: &Job) -> String {
    let mut classes = vec!["job-card"];
    if job.featured {
        classes.push("job-card--featured");
    }

    let mut badges = String::new();
    if job.new {
        badges.push_str(r#"<span class="badge badge--new">New!</span>"#);
    }
    if job.featured {
        badges.push_str(r#"<span class="badge badge--featured">Featured</span>"#);
    }

    let tag_row = render_tag_row(job);

    format!(
        r#"<article class="{classes}">
  <img class="job-card__logo" src="{logo}" alt="{company}" />
  <div class="job-card__info">
    <p class="job-card__company">{company}{badges}</p>
    <h2 class="job-card__position">{position}</h2>
    <ul class="job-card__meta">
      <li>{posted_at}</li>
      <li>{contract}</li>
      <li>{location}</li>
    </ul>
  </div>
  <div class="job-card__tags">
{tags}
  </div>
  <hr class="job-card__separator" />
  <div class="job-card__tags job-card__tags--bottom">
{tags}
  </div>
</article>"#,
        classes = classes.join(" "),
        logo = escape(&job.logo),
        company = escape(&job.company),
        badges = badges,
        position = escape(&job.position),
        posted_at = escape(&job.posted_at),
        contract = escape(&job.contract),
        location = escape(&job.location),
        tags = tag_row,
    )
}

/// Concatenates card fragments for the visible jobs. The caller replaces
/// the job-list region's contents with the result wholesale.
pub fn render_job_list(jobs: &[&Job]) -> String {
    jobs.iter()
        .map(|job| render_job_card(job))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the filter bar: one removable chip per active tag plus the
/// clear-all control. The caller hides the region when the set is empty.
pub fn render_filter_bar(filters: &FilterSet) -> String {
    let chips = filters
        .iter()
        .map(|tag| {
            format!(
                r#"<span class="chip">{0}<button class="chip-close" data-tag="{0}">&times;</button></span>"#,
                escape(tag)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="filter-bar">
{chips}
<button class="clear-filters">Clear</button>
</div>"#,
        chips = chips,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job {
            company: "Photosnap".to_string(),
            logo: "./images/photosnap.svg".to_string(),
            position: "Senior Frontend Developer".to_string(),
            role: "Frontend".to_string(),
            level: "Senior".to_string(),
            languages: vec!["HTML".to_string(), "CSS".to_string()],
            tools: vec![],
            posted_at: "1d ago".to_string(),
            contract: "Full Time".to_string(),
            location: "USA Only".to_string(),
            new: true,
            featured: true,
        }
    }

    #[test]
    fn test_card_contains_company_position_and_meta() {
        let html = render_job_card(&sample_job());
        assert!(html.contains("Photosnap"));
        assert!(html.contains("Senior Frontend Developer"));
        assert!(html.contains("<li>1d ago</li>"));
        assert!(html.contains("<li>Full Time</li>"));
        assert!(html.contains("<li>USA Only</li>"));
        assert!(html.contains(r#"src="./images/photosnap.svg""#));
    }

    #[test]
    fn test_card_badges_are_conditional() {
        let html = render_job_card(&sample_job());
        assert!(html.contains("badge--new"));
        assert!(html.contains("badge--featured"));
        assert!(html.contains("job-card--featured"));

        let plain = Job {
            new: false,
            featured: false,
            ..sample_job()
        };
        let html = render_job_card(&plain);
        assert!(!html.contains("badge--new"));
        assert!(!html.contains("badge--featured"));
        assert!(!html.contains("job-card--featured"));
    }

    #[test]
    fn test_card_tags_carry_data_attribute_and_are_duplicated() {
        let html = render_job_card(&sample_job());
        // Top row and bottom row both render each tag.
        assert_eq!(
            html.matches(r#"<button class="tag" data-tag="Frontend">Frontend</button>"#)
                .count(),
            2
        );
        assert_eq!(html.matches(r#"data-tag="CSS""#).count(), 2);
        assert_eq!(html.matches("job-card__separator").count(), 1);
    }

    #[test]
    fn test_card_escapes_markup_in_data() {
        let job = Job {
            company: "A <b>&</b> Co".to_string(),
            ..Default::default()
        };
        let html = render_job_card(&job);
        assert!(html.contains("A &lt;b&gt;&amp;&lt;/b&gt; Co"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_list_renders_empty() {
        assert_eq!(render_job_list(&[]), "");
    }

    #[test]
    fn test_list_concatenates_cards_in_order() {
        let first = sample_job();
        let second = Job {
            company: "Manage".to_string(),
            ..Default::default()
        };
        let html = render_job_list(&[&first, &second]);
        let photosnap = html.find("Photosnap").unwrap();
        let manage = html.find("Manage").unwrap();
        assert!(photosnap < manage);
    }

    #[test]
    fn test_filter_bar_renders_removable_chips() {
        let mut filters = FilterSet::new();
        filters.add("Frontend");
        filters.add("CSS");

        let html = render_filter_bar(&filters);
        assert!(html.contains(r#"<button class="chip-close" data-tag="Frontend">"#));
        assert!(html.contains(r#"<button class="chip-close" data-tag="CSS">"#));
        assert!(html.contains(r#"class="clear-filters""#));

        // Insertion order is preserved.
        let frontend = html.find(r#"data-tag="Frontend""#).unwrap();
        let css = html.find(r#"data-tag="CSS""#).unwrap();
        assert!(frontend < css);
    }
}
