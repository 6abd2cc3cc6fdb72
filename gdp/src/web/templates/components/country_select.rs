use maud::{html, Render};

pub(crate) struct CountrySelect<'a> {
    pub(crate) name: &'a str,
    pub(crate) label: &'a str,
    pub(crate) countries: &'a [String],
    pub(crate) selected: &'a str,
}

impl<'a> Render for CountrySelect<'a> {
    fn render(&self) -> maud::Markup {
        let known = self.countries.iter().any(|country| country == self.selected);
        html! {
          label {
            (self.label) " "
            select name=(self.name) {
              @if !known {
                option value=(self.selected) selected { (self.selected) }
              }
              @for country in self.countries {
                option value=(country) selected[country == self.selected] { (country) }
              }
            }
          }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn selects_the_requested_country() {
        let countries = vec!["France".to_string(), "Germany".to_string()];
        let html = CountrySelect {
            name: "country",
            label: "Country",
            countries: &countries,
            selected: "Germany",
        }
        .render()
        .into_string();
        assert!(html.contains(r#"<select name="country">"#));
        assert!(html.contains(r#"<option value="Germany" selected>Germany</option>"#));
        assert!(html.contains(r#"<option value="France">France</option>"#));
    }

    #[test]
    fn unknown_country_stays_selectable() {
        let html = CountrySelect {
            name: "country_2",
            label: "Second",
            countries: &[],
            selected: "Atlantis",
        }
        .render()
        .into_string();
        assert!(html.contains(r#"<option value="Atlantis" selected>Atlantis</option>"#));
    }
}
