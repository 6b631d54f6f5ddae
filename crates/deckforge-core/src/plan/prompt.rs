//! Planner prompt construction.
//!
//! The prompt carries the JSON schema, the chart eligibility rules, and a
//! worked example so the collaborator has a precise anchor for the shape it
//! must return.

/// Stage-1 JSON schema reference included in the planner prompt.
const SCHEMA_REFERENCE: &str = r#"## Plan JSON Schema

```json
{
  "style": "string",            // REQUIRED. One-word visual theme, e.g. "modern", "vintage".
  "slides": ["string"],         // REQUIRED. One title per slide, in order.
  "stats-categories": ["string"], // Labels for a bar chart. Empty if the request has no statistics.
  "stats-numbers": [0]          // Numbers for the bar chart, index-aligned with the categories.
}
```
"#;

/// Chart eligibility rules included in the planner prompt.
const CHART_RULES: &str = r#"## Bar Chart Rules

1. Only collect statistics that share the SAME label or unit. Three or more
   comparable figures qualify; unrelated numbers do not.
2. If the request contains three or more comparable statistics, include one
   slide title that mentions "Bar Chart" and fill both statistic arrays,
   index-aligned.
3. If "stats-categories" and "stats-numbers" would have fewer than 3
   elements, or different lengths, leave BOTH empty and do NOT mention a bar
   chart in any slide title.
4. Labels must be descriptive enough to stand alone next to the bar.
"#;

/// Worked example included in the planner prompt.
const EXAMPLE: &str = r#"## Example

Request: "Space exploration has grown dramatically; NASA leads with 150
active missions, followed by the European Space Agency with 45, Roscosmos at
35, and SpaceX operating 25..."

Output:
```json
{
  "style": "vintage",
  "slides": [
    "The Dawn of the Space Age",
    "The Apollo Program and the Moon Landing",
    "The International Space Station",
    "The Future: Mars and Beyond",
    "Bar Chart: Most Active Missions"
  ],
  "stats-categories": ["NASA", "European Space Agency", "Roscosmos", "SpaceX"],
  "stats-numbers": [150, 45, 35, 25]
}
```
"#;

/// Build the full planner instruction for a user request.
pub fn build_planner_prompt(request: &str) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str("# Presentation Architect\n\n");
    prompt.push_str(
        "You are a presentation architect. From the user's request below, \
         produce a JSON object outlining a slide deck: a one-word style, an \
         ordered list of slide titles, and (when the request contains \
         comparable statistics) the data for a single bar chart.\n\n",
    );

    prompt.push_str(SCHEMA_REFERENCE);
    prompt.push('\n');
    prompt.push_str(CHART_RULES);
    prompt.push('\n');
    prompt.push_str(EXAMPLE);
    prompt.push('\n');

    prompt.push_str("## Request\n\n");
    prompt.push_str(request.trim());
    prompt.push_str("\n\nOutput *only* the raw JSON object.\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_schema_markers() {
        let prompt = build_planner_prompt("a talk about bees");
        assert!(prompt.contains("Plan JSON Schema"));
        assert!(prompt.contains("\"style\""));
        assert!(prompt.contains("stats-categories"));
        assert!(prompt.contains("stats-numbers"));
    }

    #[test]
    fn prompt_contains_chart_rules() {
        let prompt = build_planner_prompt("a talk about bees");
        assert!(prompt.contains("Bar Chart Rules"));
        assert!(prompt.contains("fewer than 3"));
    }

    #[test]
    fn prompt_embeds_request() {
        let prompt = build_planner_prompt("  the fall of Rome  ");
        assert!(prompt.contains("the fall of Rome"));
        assert!(prompt.ends_with("Output *only* the raw JSON object.\n"));
    }
}
