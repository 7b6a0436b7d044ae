//! Server-rendered HTML pages.
use crate::{articles::Article, utils::escape_html};

pub const LOGIN_FAILED: &str = "Login failed, please check your username and password.";
pub const UPLOAD_SUCCEEDED: &str = "File uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Upload failed: only PDF files are allowed.";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/css/style.css\">\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n"
    )
}

pub fn home() -> String {
    page(
        "Home",
        "<section class=\"intro\">\n\
         <h1>Welcome</h1>\n\
         <p><a href=\"/portfolio\">View portfolio</a></p>\n\
         </section>\n",
    )
}

pub fn login_form() -> String {
    page(
        "Login",
        "<form method=\"post\" action=\"/login\">\n\
         Username: <input type=\"text\" name=\"username\">\n\
         Password: <input type=\"password\" name=\"password\">\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n",
    )
}

pub fn portfolio(logged_in: bool, articles: &[Article], notices: &[String]) -> String {
    let mut body = format!("<main class=\"portfolio\" data-logged-in=\"{logged_in}\">\n");

    for notice in notices {
        body.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            escape_html(notice)
        ));
    }

    if logged_in {
        body.push_str(
            "<form method=\"post\" action=\"/upload_pdf\" enctype=\"multipart/form-data\">\n\
             <input type=\"file\" name=\"pdf_file\" accept=\".pdf\">\n\
             <button type=\"submit\">Upload</button>\n\
             </form>\n\
             <p><a href=\"/logout\">Logout</a></p>\n",
        );
    } else {
        body.push_str("<p><a href=\"/login\">Login</a></p>\n");
    }

    body.push_str("<ul class=\"articles\">\n");
    for article in articles {
        let filename = escape_html(&article.filename);
        body.push_str(&format!(
            "<li><a href=\"/uploads/{filename}\">{filename}</a> by {}</li>\n",
            escape_html(&article.author)
        ));
    }
    body.push_str("</ul>\n</main>\n");

    page("Portfolio", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_links_portfolio() {
        let html = home();

        assert!(html.contains("href=\"/portfolio\""));
        assert!(html.contains("href=\"/static/css/style.css\""));
    }

    #[test]
    fn test_anonymous_portfolio() {
        let html = portfolio(false, &[], &[]);

        assert!(html.contains("data-logged-in=\"false\""));
        assert!(html.contains("href=\"/login\""));
        assert!(!html.contains("pdf_file"));
    }

    #[test]
    fn test_logged_in_portfolio_lists_articles() {
        let articles = [Article {
            filename: "<b>.pdf".to_string(),
            author: "Alice".to_string(),
        }];
        let html = portfolio(true, &articles, &[UPLOAD_SUCCEEDED.to_string()]);

        assert!(html.contains("data-logged-in=\"true\""));
        assert!(html.contains("name=\"pdf_file\""));
        assert!(html.contains("&lt;b&gt;.pdf"));
        assert!(!html.contains("<b>.pdf"));
        assert!(html.contains(UPLOAD_SUCCEEDED));
    }

    #[test]
    fn test_notices_and_articles_one_per_line() {
        let articles = [
            Article {
                filename: "a.pdf".to_string(),
                author: "Alice".to_string(),
            },
            Article {
                filename: "b.pdf".to_string(),
                author: "Alice".to_string(),
            },
        ];
        let notices = [UPLOAD_FAILED.to_string(), UPLOAD_SUCCEEDED.to_string()];
        let html = portfolio(true, &articles, &notices);

        assert_eq!(html.matches("<p class=\"notice\">").count(), 2);
        assert!(html.contains("<li><a href=\"/uploads/a.pdf\">a.pdf</a> by Alice</li>\n"));
        assert!(html.contains("<li><a href=\"/uploads/b.pdf\">b.pdf</a> by Alice</li>\n"));
    }
}
