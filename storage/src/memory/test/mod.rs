use mongodb::bson::{doc, Document};

use crate::{
    collection::{DocumentCollection, UpdateSpec},
    error::StorageError,
    memory::MemoryCollection,
};


/// Afternoon activity on Mondays and Fridays.
fn chess_club() -> Document {
    doc! {
        "_id": "Chess Club",
        "description": "Learn strategies and compete in chess tournaments",
        "schedule": "Mondays and Fridays, 3:15 PM - 4:45 PM",
        "schedule_details": {
            "days": ["Monday", "Friday"],
            "start_time": "15:15",
            "end_time": "16:45"
        },
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    }
}

/// Early morning activity on Tuesdays.
fn math_club() -> Document {
    doc! {
        "_id": "Math Club",
        "description": "Solve challenging problems and prepare for math competitions",
        "schedule": "Tuesdays, 7:00 AM - 8:00 AM",
        "schedule_details": {
            "days": ["Tuesday"],
            "start_time": "07:00",
            "end_time": "08:00"
        },
        "max_participants": 10,
        "participants": ["james@mergington.edu"]
    }
}

/// Builds a fallback collection holding the given documents in order.
async fn collection_with(documents: Vec<Document>) -> Result<MemoryCollection, StorageError> {
    let collection = MemoryCollection::new();
    for document in documents {
        collection.insert_one(document).await?;
    }
    Ok(collection)
}
