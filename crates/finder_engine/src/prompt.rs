use serde_json::{json, Value};

/// Number of listings requested from the model per search.
pub const TARGET_LISTING_COUNT: usize = 12;

/// Instruction sent to the model, with `query` embedded verbatim.
pub fn build_prompt(query: &str) -> String {
    format!(
        "Act as a job aggregation engine. Find {TARGET_LISTING_COUNT} diverse job listings related to the query: \"{query}\".\n\
         For each job, provide the job title, company name, location, a brief 1-2 sentence description, a direct application link, and the company website.\n\
         Ensure the links are valid and direct URLs. Avoid returning listings without application links. \
         If a company website is not available, you can leave that field blank."
    )
}

/// Output contract for a single listing object.
pub fn listing_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "jobTitle": { "type": "STRING", "description": "The title of the job." },
            "companyName": { "type": "STRING", "description": "The name of the company hiring." },
            "location": {
                "type": "STRING",
                "description": "The location of the job (e.g., 'San Francisco, CA' or 'Remote')."
            },
            "description": {
                "type": "STRING",
                "description": "A brief, one to two-sentence summary of the job."
            },
            "applyLink": {
                "type": "STRING",
                "description": "The direct URL to the job application page."
            },
            "companyWebsite": {
                "type": "STRING",
                "description": "The URL to the company's main website."
            }
        },
        "required": ["jobTitle", "companyName", "location", "description", "applyLink"]
    })
}

/// Full `generateContent` request body: prompt plus JSON array response schema.
pub fn build_request_body(query: &str) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": build_prompt(query) }]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": listing_schema()
            }
        }
    })
}
